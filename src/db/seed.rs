//! Default rows installed on first boot. Seeding only ever fills empty
//! tables (or missing section rows), so live edits are never overwritten.

/// Username of the account created when the `users` table is empty.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Password of the seeded admin account. This is a known public default;
/// creation is logged loudly so operators rotate it.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin1234";

/// Icon applied to feature cards submitted without one.
pub const DEFAULT_FEATURE_ICON: &str = "fa-mug-hot";

/// Seed values for one `site_content` row.
pub struct SeedContent {
    pub section: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static str,
    pub highlight: &'static str,
    pub image: &'static str,
    pub extra_info: &'static str,
}

/// The five fixed page sections. The section keys here are the complete
/// set; nothing creates or deletes `site_content` rows after seeding.
pub const DEFAULT_CONTENT: [SeedContent; 5] = [
    SeedContent {
        section: "top",
        title: "Sample Cafe Experience",
        subtitle: "Crafted moments in every cup.",
        body: "Welcome to our sample cafe showcase. This demo site illustrates how you can \
               present an unforgettable first impression with bold imagery, curated stories, \
               and immersive design tailored for beverage and dining concepts.",
        highlight: "Sip. Savor. Share.",
        image: "/static/images/hero.svg",
        extra_info: "signature=Seasonal single-origin beans & artisanal desserts",
    },
    SeedContent {
        section: "access",
        title: "Access & Hours",
        subtitle: "Find your way to comfort.",
        body: "We welcome you to our sample location. Adjust the following details from the \
               admin dashboard to mirror your own operational hours, contact information, \
               and neighborhood tips.",
        highlight: "Weekdays: 09:00-20:00 / Weekends: 10:00-22:00",
        image: "/static/images/interior.svg",
        extra_info: "address=123 Demo Street, Sample District\n\
                     phone=000-0000-0000\n\
                     holiday=Open year-round",
    },
    SeedContent {
        section: "reservations",
        title: "Reservations",
        subtitle: "Reserve your table effortlessly.",
        body: "Demonstrate how guests can secure their seats. Integrate your preferred booking \
               platform by updating the reservation link below, or invite guests to call for \
               bespoke arrangements.",
        highlight: "Your experience, perfectly timed.",
        image: "/static/images/latte-art.svg",
        extra_info: "cta=Book Now|link=#",
    },
    SeedContent {
        section: "about",
        title: "Story & Philosophy",
        subtitle: "Hospitality shaped by passion.",
        body: "This space is ideal for sharing the ethos behind your brand — from sourcing \
               ingredients to honoring community. Customize the narrative to articulate the \
               values that distinguish your establishment.",
        highlight: "Crafting comfort through mindful details.",
        image: "/static/images/roastery.svg",
        extra_info: "team=Founder, Head Roaster, Experience Curator",
    },
    SeedContent {
        section: "features",
        title: "Highlights",
        subtitle: "Distinctive delights for every visit.",
        body: "Update these feature cards to emphasize seasonal menus, artisan partnerships, \
               or special services.",
        highlight: "Curated just for you.",
        image: "/static/images/dessert.svg",
        extra_info: "",
    },
];

/// Seeded gallery rows as (file_path, caption); display_order is the
/// 1-based position in this list.
pub const DEFAULT_GALLERY: [(&str, &str); 3] = [
    ("/static/images/gallery1.svg", "Signature espresso moment"),
    ("/static/images/gallery2.svg", "Community events & pop-ups"),
    ("/static/images/gallery3.svg", "Curated desserts & pairings"),
];

/// Seeded feature cards as (title, description, icon).
pub const DEFAULT_FEATURES: [(&str, &str, &str); 3] = [
    (
        "Seasonal Pairings",
        "Rotating dessert collaborations designed for each roast profile.",
        "fa-leaf",
    ),
    (
        "Acoustic Evenings",
        "Live sessions every weekend featuring local talent.",
        "fa-music",
    ),
    (
        "Barista Workshops",
        "Hands-on brewing classes to empower enthusiasts.",
        "fa-chalkboard-teacher",
    ),
];

/// The single seeded announcement as (title, content).
pub const DEFAULT_ANNOUNCEMENT: (&str, &str) = (
    "Now Brewing: Demo Origin",
    "Showcase a featured bean or seasonal menu item to keep guests informed.",
);

/// Reservation services with their own link styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingPortal {
    OpenTable,
    Resy,
    Tock,
    Direct,
    Yelp,
    Google,
    Other,
}

impl BookingPortal {
    /// Case-insensitive; anything unrecognised is `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "opentable" => BookingPortal::OpenTable,
            "resy" => BookingPortal::Resy,
            "tock" => BookingPortal::Tock,
            "direct" => BookingPortal::Direct,
            "yelp" => BookingPortal::Yelp,
            "google" => BookingPortal::Google,
            _ => BookingPortal::Other,
        }
    }

    pub fn style(self) -> PortalStyle {
        let (background, hover) = match self {
            BookingPortal::OpenTable => ("#dc2626", "#b91c1c"),
            BookingPortal::Resy => ("#ea580c", "#9a3412"),
            BookingPortal::Tock => ("#2563eb", "#1d4ed8"),
            BookingPortal::Direct => ("#000000", "#1f2937"),
            BookingPortal::Yelp => ("#ca8a04", "#a16207"),
            BookingPortal::Google => ("#16a34a", "#15803d"),
            BookingPortal::Other => ("#4b5563", "#374151"),
        };
        PortalStyle {
            class: self.class_name(),
            background,
            hover,
        }
    }

    fn class_name(self) -> &'static str {
        match self {
            BookingPortal::OpenTable => "portal-opentable",
            BookingPortal::Resy => "portal-resy",
            BookingPortal::Tock => "portal-tock",
            BookingPortal::Direct => "portal-direct",
            BookingPortal::Yelp => "portal-yelp",
            BookingPortal::Google => "portal-google",
            BookingPortal::Other => "portal-other",
        }
    }

    pub const ALL: [BookingPortal; 7] = [
        BookingPortal::OpenTable,
        BookingPortal::Resy,
        BookingPortal::Tock,
        BookingPortal::Direct,
        BookingPortal::Yelp,
        BookingPortal::Google,
        BookingPortal::Other,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalStyle {
    pub class: &'static str,
    pub background: &'static str,
    pub hover: &'static str,
}

pub fn style(portal_name: &str) -> PortalStyle {
    BookingPortal::from_name(portal_name).style()
}

//! Page identifiers and the camera slot each page renders through.

use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Web,
    Music,
    AboutUs,
    Contact,
    Hell,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Web,
        Page::Music,
        Page::AboutUs,
        Page::Contact,
        Page::Hell,
    ];

    /// Rooms walked through with the player-attached camera.
    #[inline]
    pub fn is_first_person(self) -> bool {
        matches!(self, Page::Music | Page::AboutUs | Page::Contact)
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Page::Web => 0,
            Page::Music => 1,
            Page::AboutUs => 2,
            Page::Contact => 3,
            Page::Hell => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Page::Web => "web",
            Page::Music => "music",
            Page::AboutUs => "about_us",
            Page::Contact => "contact",
            Page::Hell => "hell",
        }
    }

    #[inline]
    pub fn camera_slot(self) -> CameraSlot {
        match self {
            Page::Web => CameraSlot::Fixed,
            Page::Hell => CameraSlot::Basement,
            Page::Music | Page::AboutUs | Page::Contact => CameraSlot::FirstPerson,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| CoreError::UnknownPage(s.to_string()))
    }
}

/// Which of the three cameras renders a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraSlot {
    /// Overhead camera looking at the web; never moves.
    Fixed,
    /// Player-attached camera used inside the rooms.
    FirstPerson,
    /// Player-attached camera used in the basement.
    Basement,
}

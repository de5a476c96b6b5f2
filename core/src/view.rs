//! View types for the rendered cards
//!
//! A [`Card`] is everything the host needs to build one visual unit. The
//! image fallback is tracked here rather than in the host's error hook so
//! that the at-most-once swap holds no matter how often the host reports a
//! failed load.

use serde::Serialize;

use crate::config::RosterConfig;
use crate::types::Student;

/// Which image source a card is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageState {
    /// Icon path requested, no failure seen yet
    Primary,
    /// Icon failed once and the portrait path was substituted
    Fallback,
}

/// Card image with its one-shot fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    state: ImageState,
    primary: String,
    fallback: String,
}

impl CardImage {
    pub fn new(primary: String, fallback: String) -> Self {
        Self {
            state: ImageState::Primary,
            primary,
            fallback,
        }
    }

    pub fn state(&self) -> ImageState {
        self.state
    }

    /// The source the image element should currently point at
    pub fn src(&self) -> &str {
        match self.state {
            ImageState::Primary => &self.primary,
            ImageState::Fallback => &self.fallback,
        }
    }

    /// Record a load failure of the current source.
    ///
    /// Returns the new source the first time; every later failure returns
    /// `None` and leaves the card on the fallback.
    pub fn on_load_error(&mut self) -> Option<&str> {
        match self.state {
            ImageState::Primary => {
                self.state = ImageState::Fallback;
                Some(&self.fallback)
            }
            ImageState::Fallback => None,
        }
    }
}

/// One rendered student
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub image: CardImage,
    pub name: String,
    pub school: String,
}

impl Card {
    /// Build the card for a record. The record is consumed; nothing keeps a
    /// reference to it once the card exists.
    pub fn build(student: Student, config: &RosterConfig) -> Self {
        let image = CardImage::new(
            config.icon_path(&student.id),
            config.portrait_path(&student.id),
        );
        Self {
            image,
            name: student.name,
            school: student.school,
        }
    }
}

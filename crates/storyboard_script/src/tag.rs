//! Annotation tag vocabulary.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Tag words that open a description annotation such as `[画面：...]`.
///
/// Every tag has the same effect: the annotation text is extracted and
/// appended to the scene description.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use storyboard_script::AnnotationTag;
///
/// assert_eq!(AnnotationTag::Visual.as_str(), "画面");
/// assert_eq!(AnnotationTag::from_str("特写").unwrap(), AnnotationTag::CloseUp);
/// assert_eq!(AnnotationTag::all().len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString)]
pub enum AnnotationTag {
    /// Shot or image
    #[strum(serialize = "画面")]
    Visual,
    /// Close-up
    #[strum(serialize = "特写")]
    CloseUp,
    /// Montage
    #[strum(serialize = "蒙太奇")]
    Montage,
}

impl AnnotationTag {
    /// The tag word as written in scripts.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationTag::Visual => "画面",
            AnnotationTag::CloseUp => "特写",
            AnnotationTag::Montage => "蒙太奇",
        }
    }

    /// All recognized tags in declaration order.
    pub fn all() -> Vec<AnnotationTag> {
        AnnotationTag::iter().collect()
    }
}

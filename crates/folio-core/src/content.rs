//! The five ordered content blocks of the hero section.

use serde::{Deserialize, Serialize};

/// One of the fixed, ordered fragments shown in the hero.
///
/// The position in [`ContentBlock::ALL`] is the block's identity and drives
/// its entrance delay.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ContentBlock {
    /// Small mono label above the name ("Hi, this is")
    Greeting,
    /// The big name heading
    Name,
    /// One-line tagline under the name
    Tagline,
    /// Bio paragraph
    Bio,
    /// Link to the resume document
    ResumeLink,
}

impl ContentBlock {
    /// Every block, in reveal order.
    pub const ALL: [ContentBlock; 5] = [
        ContentBlock::Greeting,
        ContentBlock::Name,
        ContentBlock::Tagline,
        ContentBlock::Bio,
        ContentBlock::ResumeLink,
    ];

    /// Position of this block in the reveal order (0-4).
    pub fn index(&self) -> usize {
        match self {
            ContentBlock::Greeting => 0,
            ContentBlock::Name => 1,
            ContentBlock::Tagline => 2,
            ContentBlock::Bio => 3,
            ContentBlock::ResumeLink => 4,
        }
    }
}

/// Resume link target and label.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeLink {
    pub href: String,
    pub label: String,
}

impl Default for ResumeLink {
    fn default() -> Self {
        Self {
            href: "/resume.pdf".to_string(),
            label: "Check out my resume".to_string(),
        }
    }
}

/// Text shown by the content blocks.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub greeting: String,
    pub name: String,
    pub tagline: String,
    pub bio: String,
    pub resume: ResumeLink,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            greeting: "Hi, this is".to_string(),
            name: "Chetan Aditya".to_string(),
            tagline: "Engineering Intelligence for Tomorrow.".to_string(),
            bio: "A software engineer passionate about AI/ML. With experience from internships \
                  at Google and AWS, I\u{2019}ve worked on predictive modeling and real-world AI \
                  challenges. I actively contribute to open-source projects and lead initiatives \
                  promoting innovation, with impactful projects."
                .to_string(),
            resume: ResumeLink::default(),
        }
    }
}

impl HeroContent {
    /// Text for a block. The resume block yields its label.
    pub fn text(&self, block: ContentBlock) -> &str {
        match block {
            ContentBlock::Greeting => &self.greeting,
            ContentBlock::Name => &self.name,
            ContentBlock::Tagline => &self.tagline,
            ContentBlock::Bio => &self.bio,
            ContentBlock::ResumeLink => &self.resume.label,
        }
    }
}

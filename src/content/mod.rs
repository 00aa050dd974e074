//! Portfolio content model
//!
//! Plain data for every section: profile, skills, projects, quotes, and
//! contact channels. Ships with built-in defaults and accepts a JSON
//! override file from the user config directory, so the binary stays
//! useful without any setup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{FolioError, Result, APP_NAME, CONTENT_FILE};

/// Complete portfolio content consumed by the section screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Who the portfolio belongs to
    pub profile: Profile,
    /// Technical skills grouped by area
    pub skill_groups: Vec<SkillGroup>,
    /// Soft skills shown as a flat list
    pub soft_skills: Vec<String>,
    /// Showcased projects
    pub projects: Vec<Project>,
    /// Rotating quotes
    pub quotes: Vec<String>,
    /// Ways to get in touch
    pub contact: Vec<ContactChannel>,
}

/// Identity and hero/about copy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    /// About-section paragraphs
    pub bio: Vec<String>,
    /// Short cards shown next to the bio
    pub highlights: Vec<Highlight>,
    /// Headline numbers
    pub stats: Vec<Stat>,
}

/// One highlight card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub blurb: String,
}

/// One headline number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// A group of related skills
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub badge: String,
    pub skills: Vec<Skill>,
}

/// One skill with a short blurb
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub blurb: String,
}

/// A showcased project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// One contact channel (label plus address or URL)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
}

impl Content {
    /// Load content from the standard override file, or the built-in
    /// defaults when no override exists
    pub fn load() -> Result<Self> {
        let path = Self::content_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load content from an explicit JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FolioError::ContentError(format!(
                "Failed to read content file {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            FolioError::ContentError(format!(
                "Failed to parse content file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Get the standard content override file path
    /// Uses $CONFIG_HOME/folio/content.json or the platform equivalent
    pub fn content_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            FolioError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONTENT_FILE))
    }

    /// Projects flagged as featured, in declaration order
    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|project| project.featured)
    }
}

impl Default for Content {
    fn default() -> Self {
        defaults::content()
    }
}

mod defaults {
    use super::*;

    fn skill(name: &str, blurb: &str) -> Skill {
        Skill {
            name: name.to_string(),
            blurb: blurb.to_string(),
        }
    }

    fn group(title: &str, badge: &str, skills: Vec<Skill>) -> SkillGroup {
        SkillGroup {
            title: title.to_string(),
            badge: badge.to_string(),
            skills,
        }
    }

    pub(super) fn content() -> Content {
        Content {
            profile: Profile {
                name: "Shivay Wadhera".to_string(),
                title: "Software Developer".to_string(),
                tagline: "A passionate developer with a business mindset".to_string(),
                bio: vec![
                    "A developer passionate about Python, frontend development, and UI/UX design, \
                     with a creative edge in graphic designing."
                        .to_string(),
                    "Currently exploring Data Engineering and AI-driven solutions, focusing on \
                     building clean, scalable, and user-centric applications."
                        .to_string(),
                ],
                highlights: vec![
                    Highlight {
                        title: "Frontend Developer".to_string(),
                        blurb: "Building end-to-end solutions with modern technologies".to_string(),
                    },
                    Highlight {
                        title: "Continuous Learner".to_string(),
                        blurb: "Always exploring new technologies and methodologies".to_string(),
                    },
                    Highlight {
                        title: "Business Mindset".to_string(),
                        blurb: "Understanding the intersection of tech and business value"
                            .to_string(),
                    },
                    Highlight {
                        title: "Passionate Creator".to_string(),
                        blurb: "Love building products that make a difference".to_string(),
                    },
                ],
                stats: vec![
                    Stat {
                        value: "10+".to_string(),
                        label: "Projects Completed".to_string(),
                    },
                    Stat {
                        value: "15+".to_string(),
                        label: "Technologies".to_string(),
                    },
                ],
            },
            skill_groups: vec![
                group(
                    "Frontend Technologies",
                    "🖥️",
                    vec![
                        skill("HTML5", "Semantic markup & accessibility"),
                        skill("CSS3", "Modern layouts & animations"),
                        skill("JavaScript", "ES6+ & DOM manipulation"),
                        skill("Angular", "Enterprise SPA framework"),
                    ],
                ),
                group(
                    "Programming & Scripting",
                    "🧠",
                    vec![
                        skill("Python", "Scripting & automation"),
                        skill("DSA", "Data Structures & Algorithms"),
                    ],
                ),
                group(
                    "Python Libraries & Frameworks",
                    "🐍",
                    vec![
                        skill("NumPy", "Numerical computing"),
                        skill("Pandas", "Data manipulation & analysis"),
                        skill("Matplotlib", "Data visualization"),
                        skill("Scikit-learn", "Machine learning toolkit"),
                    ],
                ),
                group(
                    "Databases & Storage",
                    "🗄️",
                    vec![
                        skill("PostgreSQL", "Advanced relational database"),
                        skill("MySQL", "Popular SQL database"),
                    ],
                ),
                group(
                    "Version Control",
                    "🔧",
                    vec![
                        skill("Git", "Everyday source control"),
                        skill("GitLab", "CI/CD & collaboration"),
                    ],
                ),
                group(
                    "UI/UX & Design",
                    "🎨",
                    vec![
                        skill("Figma", "UI prototyping & design"),
                        skill("Canva", "Quick graphics & branding"),
                    ],
                ),
                group(
                    "3D & Creative",
                    "🧊",
                    vec![skill("Blender", "3D modeling & animation")],
                ),
            ],
            soft_skills: vec![
                "Communication".to_string(),
                "Business Thinking".to_string(),
                "Problem Solving".to_string(),
                "Team Collaboration".to_string(),
                "Agile Methodology".to_string(),
                "Leadership".to_string(),
                "Critical Thinking".to_string(),
                "Time Management".to_string(),
            ],
            projects: vec![
                Project {
                    title: "AyurVerse".to_string(),
                    description: "An innovative platform exploring Ayurvedic wellness solutions \
                                  with modern technology integration."
                        .to_string(),
                    tech: vec![
                        "React".to_string(),
                        "Node.js".to_string(),
                        "MongoDB".to_string(),
                    ],
                    repo: Some("https://github.com/Swadhera25/AyurVerse.git".to_string()),
                    featured: true,
                },
                Project {
                    title: "Movie Recommendation System".to_string(),
                    description: "An intelligent movie recommendation engine using machine \
                                  learning algorithms to suggest personalized movie choices."
                        .to_string(),
                    tech: vec![
                        "Python".to_string(),
                        "Machine Learning".to_string(),
                        "Data Science".to_string(),
                    ],
                    repo: Some(
                        "https://github.com/Swadhera25/Movie-Recommendation-System.git".to_string(),
                    ),
                    featured: true,
                },
                Project {
                    title: "Electronic Health Record (EHR)".to_string(),
                    description: "A comprehensive healthcare management system for patient \
                                  records, appointments, and medical data. Currently in \
                                  development."
                        .to_string(),
                    tech: vec![
                        "React".to_string(),
                        "Node.js".to_string(),
                        "PostgreSQL".to_string(),
                    ],
                    repo: Some("https://github.com/kushalt03/EHR.git".to_string()),
                    featured: false,
                },
                Project {
                    title: "3D Rock Paper Scissors".to_string(),
                    description: "An interactive 3D implementation of the classic Rock Paper \
                                  Scissors game with immersive visuals."
                        .to_string(),
                    tech: vec![
                        "JavaScript".to_string(),
                        "3D Graphics".to_string(),
                        "Game Dev".to_string(),
                    ],
                    repo: Some(
                        "https://github.com/Swadhera25/Rock-Paper-Scissors-.git".to_string(),
                    ),
                    featured: false,
                },
            ],
            quotes: vec![
                "Consistency creates mastery.".to_string(),
                "Build today what you'll thank yourself for tomorrow.".to_string(),
                "Small progress is still progress.".to_string(),
                "Learning never stops for builders.".to_string(),
                "Code with purpose, grow with patience.".to_string(),
                "Discipline outperforms motivation.".to_string(),
                "Every project makes you better.".to_string(),
                "Dream big, start small, act now.".to_string(),
                "The best time to start was yesterday. The next best time is now.".to_string(),
                "Embrace the struggle - it's shaping your success.".to_string(),
                "Your code is a reflection of your growth.".to_string(),
                "Fail fast, learn faster, build fastest.".to_string(),
                "Curiosity is the fuel for innovation.".to_string(),
                "Great things are built one commit at a time.".to_string(),
            ],
            contact: vec![
                ContactChannel {
                    label: "Email".to_string(),
                    value: "contact@shivaywadhera.com".to_string(),
                },
                ContactChannel {
                    label: "GitHub".to_string(),
                    value: "github.com/Swadhera25".to_string(),
                },
                ContactChannel {
                    label: "LinkedIn".to_string(),
                    value: "linkedin.com/in/shivaywadhera".to_string(),
                },
                ContactChannel {
                    label: "Website".to_string(),
                    value: "shivaywadhera.com".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_content_is_complete() {
        let content = Content::default();
        assert!(!content.profile.name.is_empty());
        assert!(!content.skill_groups.is_empty());
        assert!(content.skill_groups.iter().all(|g| !g.skills.is_empty()));
        assert!(!content.soft_skills.is_empty());
        assert_eq!(content.quotes.len(), 14);
        assert!(!content.contact.is_empty());
        assert_eq!(content.featured_projects().count(), 2);
    }

    #[test]
    fn test_json_round_trip() {
        let content = Content::default();
        let json = serde_json::to_string_pretty(&content).unwrap();
        let parsed: Content = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.projects.len(), content.projects.len());
        assert_eq!(parsed.profile.name, content.profile.name);
    }

    #[test]
    fn test_load_from_override_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");

        let mut content = Content::default();
        content.profile.name = "Someone Else".to_string();
        fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();

        let loaded = Content::load_from(&path).unwrap();
        assert_eq!(loaded.profile.name, "Someone Else");
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let result = Content::load_from(&dir.path().join("nope.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        fs::write(&path, "{ not json").unwrap();

        match Content::load_from(&path) {
            Err(FolioError::ContentError(_)) => {}
            other => panic!("expected content error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_content_file_path() {
        let path = Content::content_file_path().unwrap();
        assert!(path.to_string_lossy().contains("folio"));
        assert!(path.to_string_lossy().contains("content.json"));
    }
}

use std::sync::LazyLock;

use reqwest::Url;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";
const MAPS_URL: &str = "https://maps.google.com/";
const MAX_SKILL_LEVEL: u8 = 100;

/// Served from `public/`.
pub const SITE_ICON: &str = "/favicon.svg";

/// Site content, parsed once on first access.
pub static PORTFOLIO: LazyLock<Portfolio> =
    LazyLock::new(|| Portfolio::load().expect("Embedded portfolio content should parse"));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub personal: PersonalInfo,
    pub hero: Hero,
    pub about: About,
    pub skills: Skills,
    pub projects: Vec<Project>,
    /// Authored order is display order.
    pub experience: Vec<Experience>,
    pub navigation: Vec<NavItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub resume: String,
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub roles: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub bio: String,
    pub highlights: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub technical: Vec<Skill>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Cloud,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Cloud,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::Cloud => "Cloud",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
    pub demo_url: String,
    pub source_url: String,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    Frontend,
    Backend,
    #[serde(rename = "Full Stack")]
    FullStack,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::Frontend,
        ProjectCategory::Backend,
        ProjectCategory::FullStack,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Frontend => "Frontend",
            ProjectCategory::Backend => "Backend",
            ProjectCategory::FullStack => "Full Stack",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let file = ContentAssets::get(PORTFOLIO_FILE)
            .ok_or_else(|| ContentError::NotFound(PORTFOLIO_FILE.to_string()))?;
        Self::from_slice(&file.data)
    }

    pub fn from_slice(data: &[u8]) -> Result<Self, ContentError> {
        let mut portfolio: Portfolio = serde_json::from_slice(data)?;
        for skill in portfolio.skills.technical.iter_mut() {
            skill.level = skill.level.min(MAX_SKILL_LEVEL);
        }
        Ok(portfolio)
    }

    /// `None` selects every skill.
    pub fn skills_in(&self, filter: Option<SkillCategory>) -> Vec<&Skill> {
        self.skills
            .technical
            .iter()
            .filter(|s| filter.is_none_or(|c| s.category == c))
            .collect()
    }

    pub fn skill_count(&self, category: SkillCategory) -> usize {
        self.skills
            .technical
            .iter()
            .filter(|s| s.category == category)
            .count()
    }

    /// `None` selects every project.
    pub fn projects_in(&self, filter: Option<ProjectCategory>) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| filter.is_none_or(|c| p.category == c))
            .collect()
    }

    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn section_ids(&self) -> Vec<&str> {
        self.navigation.iter().map(|n| n.id.as_str()).collect()
    }
}

impl Project {
    /// The first `max` technologies and how many were left out.
    pub fn tag_preview(&self, max: usize) -> (&[String], usize) {
        let shown = max.min(self.technologies.len());
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

impl PersonalInfo {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn maps_url(&self) -> String {
        Url::parse_with_params(MAPS_URL, &[("q", self.location.as_str())])
            .map(String::from)
            .unwrap_or_else(|_| MAPS_URL.to_string())
    }
}

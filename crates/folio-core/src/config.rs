//! Content manifest: the static body list, skill constellation, and section
//! order the engine choreographs. Loaded from JSON when the host page embeds
//! one, otherwise the compiled-in defaults are used.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constellation::{SkillCluster, SkillStar};
use crate::orbit::BodyConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid content manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content manifest has no bodies")]
    NoBodies,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentManifest {
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub constellation: Vec<SkillCluster>,
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,
}

impl ContentManifest {
    /// Parse a manifest from a JSON string. A manifest without bodies is
    /// rejected: the camera and overlay contracts assume at least one.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let manifest: Self = serde_json::from_str(json)?;
        if manifest.bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }
        Ok(manifest)
    }
}

fn default_sections() -> Vec<String> {
    ["home", "about", "skills", "experience", "projects", "contact"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn body(
    name: &str,
    distance: f32,
    angular_speed: f32,
    initial_phase: f32,
    visual_scale: f32,
) -> BodyConfig {
    BodyConfig {
        name: name.to_owned(),
        distance,
        angular_speed,
        initial_phase,
        visual_scale,
        link: String::new(),
        description: String::new(),
        images: Vec::new(),
        technologies: Vec::new(),
    }
}

fn star(name: &str, x: f32, y: f32, base_scale: f32) -> SkillStar {
    SkillStar {
        name: name.to_owned(),
        offset: [x, y, 0.0],
        base_scale,
    }
}

impl Default for ContentManifest {
    fn default() -> Self {
        use std::f32::consts::PI;
        let bodies = vec![
            body("Mercury", 13.0, 0.5, 0.0, 1.6),
            body("Venus", 20.0, 0.35, PI, 1.8),
            body("Earth", 27.0, 0.3, PI / 4.0, 1.9),
            body("Mars", 34.0, 0.25, PI / 2.0, 1.7),
            body("Jupiter", 41.0, 0.1, 3.0 * PI / 4.0, 2.4),
            body("Saturn", 48.0, 0.08, PI, 2.2),
            body("Uranus", 55.0, 0.05, 5.0 * PI / 4.0, 2.1),
            body("Neptune", 62.0, 0.04, 3.0 * PI / 2.0, 2.1),
            body("Pluto", 69.0, 0.03, 7.0 * PI / 4.0, 1.5),
        ];

        let constellation = vec![
            SkillCluster {
                name: "center".to_owned(),
                offset: [0.0, 0.8, 0.0],
                stars: vec![star("Full Stack Web Development", 0.0, 0.0, 0.28)],
                edges: vec![],
            },
            SkillCluster {
                name: "hat".to_owned(),
                offset: [-1.8, 0.0, 0.0],
                stars: vec![
                    star("HTML", -0.3, 0.6, 0.1),
                    star("CSS", -0.1, 1.1, 0.1),
                    star("JavaScript", 0.3, 0.5, 0.1),
                    star("NoSQL", 0.2, -0.3, 0.1),
                    star("Git", 0.8, -0.5, 0.1),
                    star("Advanced SQL", 1.0, -0.3, 0.1),
                    star("DevOps", 0.7, 0.1, 0.1),
                ],
                edges: vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)],
            },
            SkillCluster {
                name: "book".to_owned(),
                offset: [2.2, 0.0, 0.0],
                stars: vec![
                    star("Python", -0.7, -0.1, 0.16),
                    star("C++", -0.2, -0.1, 0.16),
                    star("Java", -0.7, -0.5, 0.16),
                    star("SQL", -0.2, -0.5, 0.16),
                ],
                edges: vec![(0, 1), (1, 3), (3, 2), (2, 0)],
            },
            SkillCluster {
                name: "cluster".to_owned(),
                offset: [2.2, 0.7, 0.0],
                stars: vec![
                    star("Mobile Dev", 0.3, 0.0, 0.16),
                    star("Flutter", -0.8, 0.4, 0.16),
                    star("Machine Learning", -0.5, 0.0, 0.16),
                ],
                edges: vec![],
            },
        ];

        Self {
            bodies,
            constellation,
            sections: default_sections(),
        }
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Desktop layout description.
//!
//! The layout names the folder icons on the desktop, the section window
//! each folder opens, and the main window that is always shown.

use serde::{Deserialize, Serialize};

/// Suffix that turns a folder section name into its window id.
pub const SECTION_WINDOW_SUFFIX: &str = "-window";

/// Window id opened by the folder with the given section name.
pub fn section_window_id(section: &str) -> String {
    format!("{section}{SECTION_WINDOW_SUFFIX}")
}

/// A clickable folder icon on the desktop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderSpec {
    pub section: String,
    pub label: String,
    #[serde(default = "default_folder_icon")]
    pub icon: String,
}

fn default_folder_icon() -> String {
    "📁".to_string()
}

/// Content shown inside a window body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WindowBody {
    Text { paragraphs: Vec<String> },
    /// Hosts the `projects-grid` render target.
    ProjectsGrid,
    /// Text followed by a "Download CV" button.
    Cv { paragraphs: Vec<String> },
}

/// A draggable window with a header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub position: [f32; 2],
    #[serde(default = "default_window_size")]
    pub size: [f32; 2],
    pub body: WindowBody,
}

fn default_window_size() -> [f32; 2] {
    [420.0, 320.0]
}

/// Folders, section windows and the main window of the desktop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopLayout {
    pub main_window: WindowSpec,
    #[serde(default)]
    pub folders: Vec<FolderSpec>,
    #[serde(default)]
    pub windows: Vec<WindowSpec>,
}

impl DesktopLayout {
    /// Whether any window hosts the project card grid.
    pub fn hosts_projects_grid(&self) -> bool {
        std::iter::once(&self.main_window)
            .chain(self.windows.iter())
            .any(|w| w.body == WindowBody::ProjectsGrid)
    }
}

impl Default for DesktopLayout {
    fn default() -> Self {
        let folder = |section: &str, label: &str, icon: &str| FolderSpec {
            section: section.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
        };

        Self {
            main_window: WindowSpec {
                id: "main-window".to_string(),
                title: "Bienvenue".to_string(),
                position: [360.0, 60.0],
                size: [380.0, 180.0],
                body: WindowBody::Text {
                    paragraphs: vec![
                        "Portfolio créatif : vidéo, photo, 3D et design.".to_string(),
                        "Ouvrez un dossier pour explorer.".to_string(),
                    ],
                },
            },
            folders: vec![
                folder("about", "À propos", "🗂"),
                folder("projects", "Projets", "📁"),
                folder("contact", "Contact", "✉"),
            ],
            windows: vec![
                WindowSpec {
                    id: section_window_id("about"),
                    title: "À propos".to_string(),
                    position: [180.0, 120.0],
                    size: [420.0, 260.0],
                    body: WindowBody::Cv {
                        paragraphs: vec![
                            "Étudiant·e en design et création numérique.".to_string(),
                        ],
                    },
                },
                WindowSpec {
                    id: section_window_id("projects"),
                    title: "Projets".to_string(),
                    position: [220.0, 80.0],
                    size: [720.0, 520.0],
                    body: WindowBody::ProjectsGrid,
                },
                WindowSpec {
                    id: section_window_id("contact"),
                    title: "Contact".to_string(),
                    position: [260.0, 160.0],
                    size: [360.0, 200.0],
                    body: WindowBody::Text {
                        paragraphs: vec!["contact@example.com".to_string()],
                    },
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_window_id() {
        assert_eq!(section_window_id("projects"), "projects-window");
    }

    #[test]
    fn test_default_layout_matches_folders_to_windows() {
        let layout = DesktopLayout::default();
        for folder in &layout.folders {
            let id = section_window_id(&folder.section);
            assert_eq!(
                layout.windows.iter().filter(|w| w.id == id).count(),
                1,
                "folder {} has no unique window",
                folder.section
            );
        }
        assert!(layout.hosts_projects_grid());
    }

    #[test]
    fn test_body_kind_tag() {
        let body: WindowBody = serde_yaml::from_str("kind: projects-grid\n").unwrap();
        assert_eq!(body, WindowBody::ProjectsGrid);

        let window: WindowSpec = serde_yaml::from_str(
            "id: about-window\ntitle: About\nbody:\n  kind: text\n  paragraphs: [hi]\n",
        )
        .unwrap();
        assert_eq!(window.position, [0.0, 0.0]);
        assert_eq!(window.size, [420.0, 320.0]);
    }
}

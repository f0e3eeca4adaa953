//! Built-in content so the app renders out of the box. Serves as the
//! template a real deployment replaces via `--content <file>`.

use crate::domain::{Content, Profile, Project, SkillGroup, TimelineEntry, TimelineKind};

impl Content {
    pub fn sample() -> Self {
        Self {
            profile: Profile {
                name: "Robin Mayer".into(),
                headline: "Full-Stack Developer".into(),
                location: "Leipzig, Germany".into(),
                email: "robin@robinmayer.dev".into(),
                phone: "+49 151 2345 6789".into(),
                about: "I build web applications end to end, from schema design to \
                        deployment. The last few years I have been moving the heavy \
                        parts of my stacks to Rust while keeping the front ends lean."
                    .into(),
                cv_url: "https://robinmayer.dev/cv.pdf".into(),
                github_url: "https://github.com/robin-mayer".into(),
                linkedin_url: "https://www.linkedin.com/in/robin-mayer".into(),
            },
            skills: vec![
                SkillGroup {
                    title: "Frontend".into(),
                    items: vec![
                        "TypeScript".into(),
                        "React".into(),
                        "Vue".into(),
                        "CSS".into(),
                    ],
                },
                SkillGroup {
                    title: "Backend".into(),
                    items: vec![
                        "Rust".into(),
                        "Node.js".into(),
                        "PostgreSQL".into(),
                        "Redis".into(),
                    ],
                },
                SkillGroup {
                    title: "DevOps".into(),
                    items: vec![
                        "Docker".into(),
                        "GitHub Actions".into(),
                        "AWS".into(),
                        "Terraform".into(),
                    ],
                },
            ],
            projects: vec![
                Project {
                    id: "taskboard".into(),
                    name: "Taskboard".into(),
                    one_liner: "Kanban board with offline-first sync and conflict-free merges."
                        .into(),
                    tech_stack: vec!["TypeScript".into(), "React".into(), "IndexedDB".into()],
                    tags: vec!["Full-stack".into(), "Frontend".into()],
                    thumbnail: "taskboard.png".into(),
                    repo_url: "https://github.com/robin-mayer/taskboard".into(),
                    live_url: "https://taskboard.robinmayer.dev".into(),
                },
                Project {
                    id: "meshmon".into(),
                    name: "Meshmon".into(),
                    one_liner: "Distributed uptime monitor with a mesh of probe agents.".into(),
                    tech_stack: vec!["Rust".into(), "Tokio".into(), "PostgreSQL".into()],
                    tags: vec!["Backend".into(), "Open Source".into()],
                    thumbnail: "meshmon.png".into(),
                    repo_url: "https://github.com/robin-mayer/meshmon".into(),
                    live_url: String::new(),
                },
                Project {
                    id: "archivist".into(),
                    name: "Archivist".into(),
                    one_liner: "Self-hosted bookmark archive with full-text search.".into(),
                    tech_stack: vec!["Rust".into(), "Axum".into(), "SQLite".into()],
                    tags: vec!["Full-stack".into(), "Open Source".into()],
                    thumbnail: "archivist.png".into(),
                    repo_url: "https://github.com/robin-mayer/archivist".into(),
                    live_url: "https://archive.robinmayer.dev".into(),
                },
                Project {
                    id: "palette-lab".into(),
                    name: "Palette Lab".into(),
                    one_liner: "Color palette generator with WCAG contrast checks.".into(),
                    tech_stack: vec!["Vue".into(), "TypeScript".into()],
                    tags: vec!["Frontend".into()],
                    thumbnail: "palette.png".into(),
                    repo_url: "https://github.com/robin-mayer/palette-lab".into(),
                    live_url: "https://palette.robinmayer.dev".into(),
                },
                Project {
                    id: "shipctl".into(),
                    name: "shipctl".into(),
                    one_liner: "CLI for blue-green deploys on plain VPS hosts.".into(),
                    tech_stack: vec!["Rust".into(), "Clap".into()],
                    tags: vec!["DevOps".into(), "Open Source".into(), "CLI".into()],
                    thumbnail: "shipctl.png".into(),
                    repo_url: "https://github.com/robin-mayer/shipctl".into(),
                    live_url: String::new(),
                },
                Project {
                    id: "recipe-graph".into(),
                    name: "Recipe Graph".into(),
                    one_liner: "Graph explorer linking recipes by shared ingredients.".into(),
                    tech_stack: vec!["React".into(), "D3".into(), "Node.js".into()],
                    tags: vec!["Frontend".into(), "Data".into()],
                    thumbnail: "recipes.png".into(),
                    repo_url: "https://github.com/robin-mayer/recipe-graph".into(),
                    live_url: "https://recipes.robinmayer.dev".into(),
                },
            ],
            timeline: vec![
                TimelineEntry {
                    id: "edu-bsc".into(),
                    kind: TimelineKind::Education,
                    date: "2014 - 2017".into(),
                    title: "BSc Computer Science".into(),
                    org: "University of Leipzig".into(),
                    details: vec![
                        "Focus on distributed systems".into(),
                        "Thesis on CRDT-based collaborative editing".into(),
                    ],
                },
                TimelineEntry {
                    id: "edu-aws".into(),
                    kind: TimelineKind::Education,
                    date: "2018".into(),
                    title: "AWS Solutions Architect - Associate".into(),
                    org: "Amazon Web Services".into(),
                    details: Vec::new(),
                },
                TimelineEntry {
                    id: "exp-fernweh".into(),
                    kind: TimelineKind::Experience,
                    date: "2021 - present".into(),
                    title: "Senior Full-Stack Developer".into(),
                    org: "Fernweh Labs".into(),
                    details: vec![
                        "Lead developer on the booking platform".into(),
                        "Introduced Rust services for media processing".into(),
                    ],
                },
                TimelineEntry {
                    id: "exp-datenwerk".into(),
                    kind: TimelineKind::Experience,
                    date: "2018 - 2021".into(),
                    title: "Full-Stack Developer".into(),
                    org: "Datenwerk GmbH".into(),
                    details: vec![
                        "Built dashboards for energy-sector clients".into(),
                        "Ran the on-call rotation for the ingest pipeline".into(),
                    ],
                },
                TimelineEntry {
                    id: "exp-nord".into(),
                    kind: TimelineKind::Experience,
                    date: "2017 - 2018".into(),
                    title: "Junior Web Developer".into(),
                    org: "Studio Nord".into(),
                    details: vec!["Maintained CMS sites for local businesses".into()],
                },
            ],
        }
    }
}

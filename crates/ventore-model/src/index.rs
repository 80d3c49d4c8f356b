//! Project/stage index derived from investors and cap-table lines.

use std::collections::{HashMap, HashSet};

use ventore_core::entities::{CapTableEntry, Investor, ProjectSummary, StageSummary};

/// Insertion-ordered set backed by a `Vec`.
#[derive(Debug, Default)]
struct OrderedSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedSet {
    fn insert(&mut self, item: &str) {
        if self.seen.insert(item.to_string()) {
            self.items.push(item.to_string());
        }
    }
}

#[derive(Debug)]
struct StageSlot {
    stage: String,
    stage_key: String,
    investors: OrderedSet,
    entries: OrderedSet,
}

#[derive(Debug)]
struct ProjectSlot {
    project: String,
    project_key: String,
    stages: Vec<StageSlot>,
    stage_positions: HashMap<String, usize>,
}

impl ProjectSlot {
    fn stage(&mut self, stage: &str, stage_key: &str) -> &mut StageSlot {
        let position = *self
            .stage_positions
            .entry(stage_key.to_string())
            .or_insert_with(|| {
                self.stages.push(StageSlot {
                    stage: stage.to_string(),
                    stage_key: stage_key.to_string(),
                    investors: OrderedSet::default(),
                    entries: OrderedSet::default(),
                });
                self.stages.len() - 1
            });
        &mut self.stages[position]
    }
}

#[derive(Debug, Default)]
struct IndexBuilder {
    projects: Vec<ProjectSlot>,
    positions: HashMap<String, usize>,
}

impl IndexBuilder {
    fn project(&mut self, project: &str, project_key: &str) -> &mut ProjectSlot {
        let position = *self
            .positions
            .entry(project_key.to_string())
            .or_insert_with(|| {
                self.projects.push(ProjectSlot {
                    project: project.to_string(),
                    project_key: project_key.to_string(),
                    stages: Vec::new(),
                    stage_positions: HashMap::new(),
                });
                self.projects.len() - 1
            });
        &mut self.projects[position]
    }

    fn finish(self) -> Vec<ProjectSummary> {
        self.projects
            .into_iter()
            .map(|project| ProjectSummary {
                project: project.project,
                project_key: project.project_key,
                stages: project
                    .stages
                    .into_iter()
                    .map(|stage| StageSummary {
                        stage: stage.stage,
                        stage_key: stage.stage_key,
                        investors: stage.investors.items,
                        entries: stage.entries.items,
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Group investor memberships and cap-table lines by project and stage.
///
/// Projects and stages appear in first-seen order: master investors (in
/// token order) first, then cap-table lines. The first spelling seen names
/// the project or stage.
#[must_use]
pub fn build_project_index(
    investors: &[Investor],
    cap_table: &[CapTableEntry],
) -> Vec<ProjectSummary> {
    let mut builder = IndexBuilder::default();

    for investor in investors {
        for ps in &investor.projects {
            builder
                .project(&ps.project_name, &ps.project_key)
                .stage(&ps.stage, &ps.stage_key)
                .investors
                .insert(&investor.id);
        }
    }

    for entry in cap_table {
        let stage = builder
            .project(&entry.project, &entry.project_key)
            .stage(&entry.stage, &entry.stage_key);
        stage.investors.insert(&entry.investor_key);
        stage.entries.insert(&entry.id);
    }

    builder.finish()
}

use crate::core::composer::compose_prompt;
use crate::core::estimator::{TokenBudget, estimate_tokens};
use crate::core::importer::ImportBatch;
use crate::domain::models::{ImportWarning, ImportedFile, SelectionSet};
use log::{debug, info};

/// Owns everything the prompt is derived from: template choices, the raw
/// instruction, the ordered file list, and the selection. Derived values
/// (final prompt, token estimate) are recomputed on demand, never stored.
#[derive(Debug, Default)]
pub struct PromptSession {
    task_type: String,
    custom_instruction: String,
    instruction: String,
    files: Vec<ImportedFile>,
    selection: SelectionSet,
    budget: TokenBudget,
}

impl PromptSession {
    pub fn new(budget: TokenBudget) -> Self {
        PromptSession {
            budget,
            ..PromptSession::default()
        }
    }

    pub fn set_task_type(&mut self, key: &str) {
        self.task_type = key.to_string();
    }

    pub fn set_custom_instruction(&mut self, key: &str) {
        self.custom_instruction = key.to_string();
    }

    pub fn set_instruction(&mut self, text: &str) {
        self.instruction = text.to_string();
    }

    pub fn files(&self) -> &[ImportedFile] {
        &self.files
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn budget(&self) -> TokenBudget {
        self.budget
    }

    /// Appends a whole import batch at once. A re-imported name replaces
    /// the existing record in place, keeping its list position and its
    /// selection membership.
    pub fn commit_batch(&mut self, batch: ImportBatch) -> Vec<ImportWarning> {
        info!("Committing batch of {} files", batch.files.len());
        for file in batch.files {
            match self.files.iter().position(|f| f.name == file.name) {
                Some(index) => {
                    debug!("Replacing existing entry {}", file.name);
                    self.files[index] = file;
                }
                None => self.files.push(file),
            }
        }
        batch.warnings
    }

    pub fn remove_file(&mut self, name: &str) {
        self.files.retain(|f| f.name != name);
        self.selection.remove(name);
    }

    pub fn remove_all(&mut self) {
        self.files.clear();
        self.selection.clear();
    }

    pub fn select(&mut self, name: &str) -> anyhow::Result<()> {
        if !self.files.iter().any(|f| f.name == name) {
            return Err(anyhow::anyhow!("no imported file named {}", name));
        }
        self.selection.insert(name);
        Ok(())
    }

    pub fn toggle(&mut self, name: &str) {
        if !self.files.iter().any(|f| f.name == name) {
            return;
        }
        if self.selection.contains(name) {
            self.selection.remove(name);
        } else {
            self.selection.insert(name);
        }
    }

    pub fn select_all(&mut self) {
        for file in &self.files {
            self.selection.insert(&file.name);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn final_prompt(&self) -> String {
        compose_prompt(
            &self.task_type,
            &self.custom_instruction,
            &self.instruction,
            &self.files,
            &self.selection,
        )
    }

    pub fn token_estimate(&self) -> usize {
        estimate_tokens(&self.final_prompt())
    }

    pub fn selected_line_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| self.selection.contains(&f.name))
            .map(|f| f.line_count)
            .sum()
    }
}

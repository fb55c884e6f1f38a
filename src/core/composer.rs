use crate::core::templates;
use crate::domain::models::{ImportedFile, SelectionSet};
use log::debug;

/// Builds the final prompt from the current template choices, instruction
/// text, and selected files. Pure: same inputs, same output. Files are
/// appended in file-list order regardless of selection order, each wrapped
/// in a fenced block tagged with its extension.
pub fn compose_prompt(
    task_type: &str,
    custom_instruction: &str,
    instruction: &str,
    files: &[ImportedFile],
    selection: &SelectionSet,
) -> String {
    let task_block = if instruction.is_empty() {
        String::new()
    } else {
        format!("<task>{}</task>", instruction)
    };

    let parts = [
        templates::task_type_template(task_type).unwrap_or(""),
        task_block.as_str(),
        templates::custom_instruction_template(custom_instruction).unwrap_or(""),
    ];

    let mut prompt = parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string();

    for file in files.iter().filter(|f| selection.contains(&f.name)) {
        debug!("Appending {} ({} lines) to prompt", file.name, file.line_count);
        prompt.push_str(&format!(
            "\n\n{}\n```{}\n{}\n```",
            file.name, file.extension, file.content
        ));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::templates::{custom_instruction_template, task_type_template};

    fn file(name: &str, content: &str) -> ImportedFile {
        ImportedFile::new(name.to_string(), content.len() as u64, content.to_string())
    }

    fn select(names: &[&str]) -> SelectionSet {
        let mut selection = SelectionSet::new();
        for name in names {
            selection.insert(name);
        }
        selection
    }

    #[test]
    fn test_templates_only() {
        let prompt = compose_prompt("Fix", "Default", "", &[], &SelectionSet::new());

        let expected = format!(
            "{}\n\n{}",
            task_type_template("Fix").unwrap(),
            custom_instruction_template("Default").unwrap()
        );
        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_empty_instruction_adds_no_task_block() {
        let prompt = compose_prompt("Fix", "Default", "", &[], &SelectionSet::new());
        assert!(!prompt.contains("<task>"));
    }

    #[test]
    fn test_instruction_wrapped_in_task_delimiter() {
        let prompt = compose_prompt("", "", "rename the module", &[], &SelectionSet::new());
        assert_eq!(prompt, "<task>rename the module</task>");
    }

    #[test]
    fn test_unknown_keys_contribute_nothing() {
        let prompt = compose_prompt("Bogus", "AlsoBogus", "", &[], &SelectionSet::new());
        assert_eq!(prompt, "");
    }

    #[test]
    fn test_selected_file_block_format() {
        let files = vec![file("a.ts", "x\ny\n")];
        let prompt = compose_prompt("", "", "", &files, &select(&["a.ts"]));

        assert!(prompt.ends_with("\n\na.ts\n```ts\nx\ny\n\n```"));
    }

    #[test]
    fn test_files_appear_in_list_order_exactly_once() {
        let files = vec![
            file("b.rs", "fn b() {}"),
            file("a.rs", "fn a() {}"),
            file("c.rs", "fn c() {}"),
        ];
        // Selection order differs from list order on purpose.
        let prompt = compose_prompt("", "", "", &files, &select(&["c.rs", "a.rs"]));

        let pos_a = prompt.find("a.rs").unwrap();
        let pos_c = prompt.find("c.rs").unwrap();
        assert!(pos_a < pos_c);
        assert!(!prompt.contains("b.rs"));
        assert_eq!(prompt.matches("a.rs").count(), 1);
        assert_eq!(prompt.matches("c.rs").count(), 1);
    }

    #[test]
    fn test_unselected_files_are_excluded() {
        let files = vec![file("kept.rs", "keep"), file("dropped.rs", "drop")];
        let prompt = compose_prompt("Fix", "", "", &files, &select(&["kept.rs"]));

        assert!(prompt.contains("kept.rs"));
        assert!(!prompt.contains("dropped.rs"));
    }

    #[test]
    fn test_all_three_parts_joined_by_blank_line() {
        let prompt = compose_prompt("Fix", "Default", "do it", &[], &SelectionSet::new());

        let expected = format!(
            "{}\n\n<task>do it</task>\n\n{}",
            task_type_template("Fix").unwrap(),
            custom_instruction_template("Default").unwrap()
        );
        assert_eq!(prompt, expected);
    }
}

//! Integration tests for selection interpretation against a realistically
//! formatted backend response.

use quick_suggest_cli::selection::{interpret, SelectionAction};
use quick_suggest_core::command_table::parse_command_table;

const RESPONSE: &str = r#"Here are some options:

1) grep "needle" haystack.txt
    ↳ searches for "needle" in haystack.txt.

2) grep -r "needle" .
    ↳ searches the whole directory tree

3) rg "needle"
    ↳ faster, respects .gitignore
"#;

#[test]
fn test_every_menu_entry_is_selectable() {
    let table = parse_command_table(RESPONSE);
    assert_eq!(table.len(), 3);

    for key in ["1", "2", "3"] {
        assert_eq!(
            interpret(key, &table),
            SelectionAction::Execute(key.to_string())
        );
        let copy_request = format!("{key}c");
        assert_eq!(
            interpret(&copy_request, &table),
            SelectionAction::Copy(key.to_string())
        );
    }
}

#[test]
fn test_selected_key_maps_to_the_literal_command() {
    let table = parse_command_table(RESPONSE);
    assert_eq!(table["1"], "grep \"needle\" haystack.txt");
    assert_eq!(table["2"], "grep -r \"needle\" .");
    assert_eq!(table["3"], "rg \"needle\"");
}

#[test]
fn test_out_of_menu_choices_are_invalid() {
    let table = parse_command_table(RESPONSE);

    assert_eq!(
        interpret("4", &table),
        SelectionAction::Invalid("4".to_string())
    );
    assert_eq!(
        interpret("4c", &table),
        SelectionAction::Invalid("4c".to_string())
    );
    assert_eq!(
        interpret("rg", &table),
        SelectionAction::Invalid("rg".to_string())
    );
}

#[test]
fn test_quit_works_regardless_of_table_contents() {
    let full = parse_command_table(RESPONSE);
    let empty = parse_command_table("no menu today");

    assert_eq!(interpret("q", &full), SelectionAction::Quit);
    assert_eq!(interpret("q", &empty), SelectionAction::Quit);
    assert_eq!(interpret("n", &empty), SelectionAction::Quit);
}

#[test]
fn test_empty_menu_reports_invalid_for_any_index() {
    let table = parse_command_table("The model produced prose instead of a menu.");
    assert!(table.is_empty());
    assert_eq!(
        interpret("1", &table),
        SelectionAction::Invalid("1".to_string())
    );
}

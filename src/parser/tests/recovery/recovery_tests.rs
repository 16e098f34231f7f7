use crate::Journal;
use crate::parser::Item;

#[test]
fn leading_space_recovers_at_the_next_line() {
    let input = "  2024-06-12 Payee\n2024-06-13 Next\n";

    insta::assert_snapshot!(Journal::expect_errors(input), @"error[leading-space] at 0..2: unexpected leading space at the start of a line");

    let journal = Journal::parse(input);
    assert_eq!(journal.file().children.len(), 1);
    assert!(journal.payees().has("Next"));
    assert!(!journal.payees().has("Payee"));
}

#[test]
fn items_on_either_side_of_an_error_still_parse() {
    let input = "2024-06-12 *! A\nalias good=value\n@bad\n2024-06-13 B\n";

    insta::assert_snapshot!(Journal::expect_errors(input), @r"
    error[unexpected-token] at 12..13: unexpected `!`: a transaction carries a single `*` or `!` flag
    error[unexpected-token] at 33..34: unexpected `@`
    ");

    let journal = Journal::parse(input);
    assert_eq!(journal.file().children.len(), 2);
    assert!(matches!(journal.file().children[0], Item::Alias(_)));
    assert!(matches!(journal.file().children[1], Item::Transaction(_)));
}

#[test]
fn failed_posting_discards_the_whole_transaction() {
    let input = "2024-06-12 X\n  Assets  $\n  Expenses  $2\n2024-06-13 Y\n";

    insta::assert_snapshot!(Journal::expect_errors(input), @"error[unexpected-token] at 24..25: expected an amount, found end of line");

    let journal = Journal::parse(input);
    assert_eq!(journal.file().children.len(), 1);
    let Some(Item::Transaction(transaction)) = journal.file().children.first() else {
        panic!("expected a transaction child");
    };
    assert_eq!(transaction.date.text(input), "2024-06-13");
}

#[test]
fn unexpected_token_at_top_level() {
    let input = "~\n2024-06-12 P\n";

    insta::assert_snapshot!(Journal::expect_errors(input), @"error[unexpected-token] at 0..1: unexpected `~`");

    let journal = Journal::parse(input);
    assert_eq!(journal.file().children.len(), 1);
}

#[test]
fn blank_lines_are_not_errors() {
    let input = "\n\n2024-06-12 P\n\n";

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Transaction
        Date "2024-06-12"
        Payee "P"
    "#);
}

#[test]
fn whitespace_only_input_is_an_empty_file() {
    for input in ["   ", "\t", "\n", " \n \n"] {
        let journal = Journal::parse(input);
        assert!(journal.is_valid(), "diagnostics for {input:?}");
        assert!(journal.file().children.is_empty());
        assert_eq!(journal.dump(), "File\n");
    }
}

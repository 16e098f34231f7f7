use crate::Journal;
use indoc::indoc;

#[test]
fn simple_transaction() {
    let input = indoc! {"
        2024-06-12 Grocery Store
          Expenses:Food  $50.23
          Assets:Checking
    "};

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Transaction
        Date "2024-06-12"
        Payee "Grocery Store"
        Posting
          Account "Expenses:Food"
          Amount
            Commodity "$" (pre)
            Number "50.23"
        Posting
          Account "Assets:Checking"
    "#);
}

#[test]
fn full_header() {
    let input = indoc! {"
        2024/06/12=2024/06/15 * (101) Acme Corp  ; paid
          Expenses:Tools  $250
          Assets:Checking
    "};

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Transaction
        Date "2024/06/12"
        AuxDate "2024/06/15"
        Cleared "*"
        Code "101"
        Payee "Acme Corp"
        Comment "; paid"
        Posting
          Account "Expenses:Tools"
          Amount
            Commodity "$" (pre)
            Number "250"
        Posting
          Account "Assets:Checking"
    "#);
}

#[test]
fn pending_flag_and_comment_attachment() {
    let input = indoc! {"
        2024-06-12 ! Payee
          ; header note
          Expenses  $5
          ; posting note
          Assets
    "};

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Transaction
        Date "2024-06-12"
        Pending "!"
        Payee "Payee"
        Comment "; header note"
        Posting
          Account "Expenses"
          Amount
            Commodity "$" (pre)
            Number "5"
          Comment "; posting note"
        Posting
          Account "Assets"
    "#);
}

#[test]
fn payeeless_transaction() {
    let input = indoc! {"
        2024-06-12
          Assets  $1
          Expenses
    "};

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Transaction
        Date "2024-06-12"
        Posting
          Account "Assets"
          Amount
            Commodity "$" (pre)
            Number "1"
        Posting
          Account "Expenses"
    "#);
}

#[test]
fn two_component_date() {
    insta::assert_snapshot!(Journal::expect_clean("2024-06 Payee\n"), @r#"
    File
      Transaction
        Date "2024-06"
        Payee "Payee"
    "#);
}

#[test]
fn virtual_accounts() {
    let input = indoc! {"
        2024-06-12 X
          [Assets:V]  $1
          (Expenses:V)  $1
    "};

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Transaction
        Date "2024-06-12"
        Payee "X"
        Posting
          Account "Assets:V" (balanced virtual)
          Amount
            Commodity "$" (pre)
            Number "1"
        Posting
          Account "Expenses:V" (virtual)
          Amount
            Commodity "$" (pre)
            Number "1"
    "#);
}

#[test]
fn account_names_may_contain_single_spaces() {
    let input = "2024-06-12 P\n  Assets:Bank of Mom  $1\n";

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Transaction
        Date "2024-06-12"
        Payee "P"
        Posting
          Account "Assets:Bank of Mom"
          Amount
            Commodity "$" (pre)
            Number "1"
    "#);
}

#[test]
fn soft_space_folds_the_rest_of_the_line_into_the_account() {
    let input = "2024-06-12 P\n  Assets:Checking $1\n";

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Transaction
        Date "2024-06-12"
        Payee "P"
        Posting
          Account "Assets:Checking $1"
    "#);
}

#[test]
fn second_flag_after_cleared_is_rejected() {
    let input = "2024-06-12 *! Test Payee\n";

    insta::assert_snapshot!(Journal::expect_errors(input), @"error[unexpected-token] at 12..13: unexpected `!`: a transaction carries a single `*` or `!` flag");

    let journal = Journal::parse(input);
    assert!(journal.file().children.is_empty());
}

#[test]
fn second_flag_after_pending_is_rejected() {
    let input = "2024-06-12 !* Test Payee\n";

    insta::assert_snapshot!(Journal::expect_errors(input), @"error[unexpected-token] at 12..13: unexpected `*`: a transaction carries a single `*` or `!` flag");
}

#[test]
fn date_with_mismatched_separator() {
    insta::assert_snapshot!(Journal::expect_errors("2024-06/12 P\n"), @"error[invalid-date] at 7..8: date separator `/` does not match earlier `-`");
}

#[test]
fn date_with_fractional_component() {
    insta::assert_snapshot!(Journal::expect_errors("2024-06.5-12 P\n"), @"error[invalid-integer] at 5..9: `06.5` is not an integer");
}

#[test]
fn missing_space_between_date_and_flag() {
    insta::assert_snapshot!(Journal::expect_errors("2024-06-12* P\n"), @"error[unexpected-token] at 10..11: expected a space before `*`");
}

#[test]
fn hard_space_required_after_virtual_account() {
    let input = "2024-06-12 P\n  [Assets:V] $1\n";

    insta::assert_snapshot!(Journal::expect_errors(input), @"error[unexpected-token] at 26..27: expected two or more spaces (or a tab)");
}

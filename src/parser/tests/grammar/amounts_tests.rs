use crate::Journal;
use indoc::indoc;

#[test]
fn bare_number() {
    let input = "2024-06-12 P\n  Assets  50\n";

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Transaction
        Date "2024-06-12"
        Payee "P"
        Posting
          Account "Assets"
          Amount
            Number "50"
    "#);
}

#[test]
fn post_commodity() {
    let input = "2024-06-12 P\n  Assets:Cash  50 USD\n";

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Transaction
        Date "2024-06-12"
        Payee "P"
        Posting
          Account "Assets:Cash"
          Amount
            Number "50"
            Commodity "USD" (post)
    "#);
}

#[test]
fn minus_before_pre_commodity() {
    let input = "2024-06-12 P\n  Assets  -$50.23\n";

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Transaction
        Date "2024-06-12"
        Payee "P"
        Posting
          Account "Assets"
          Amount
            Minus "-"
            Commodity "$" (pre)
            Number "50.23"
    "#);
}

#[test]
fn minus_after_pre_commodity() {
    let input = "2024-06-12 P\n  Assets  $-50.23\n";

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Transaction
        Date "2024-06-12"
        Payee "P"
        Posting
          Account "Assets"
          Amount
            Minus "-"
            Commodity "$" (pre)
            Number "50.23"
    "#);
}

#[test]
fn quoted_commodity() {
    let input = "2024-06-12 P\n  Assets  50 \"US Dollars\"\n";

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Transaction
        Date "2024-06-12"
        Payee "P"
        Posting
          Account "Assets"
          Amount
            Number "50"
            Commodity "\"US Dollars\"" (post)
    "#);
}

#[test]
fn grouped_number() {
    let input = indoc! {"
        2024-06-12 P
          Assets  1,000.00 EUR
    "};

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Transaction
        Date "2024-06-12"
        Payee "P"
        Posting
          Account "Assets"
          Amount
            Number "1,000.00"
            Commodity "EUR" (post)
    "#);
}

#[test]
fn inline_comment_after_amount() {
    let input = "2024-06-12 P\n  Assets  $1  ; lunch\n";

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Transaction
        Date "2024-06-12"
        Payee "P"
        Posting
          Account "Assets"
          Amount
            Commodity "$" (pre)
            Number "1"
          Comment "; lunch"
    "#);
}

#[test]
fn comment_instead_of_amount() {
    let input = "2024-06-12 P\n  Assets  ; note\n";

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Transaction
        Date "2024-06-12"
        Payee "P"
        Posting
          Account "Assets"
          Comment "; note"
    "#);
}

#[test]
fn commodity_without_number_is_an_error() {
    let input = "2024-06-12 P\n  Assets  $\n";

    insta::assert_snapshot!(Journal::expect_errors(input), @"error[unexpected-token] at 24..25: expected an amount, found end of line");
}

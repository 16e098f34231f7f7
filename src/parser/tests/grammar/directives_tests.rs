use crate::Journal;
use indoc::indoc;

#[test]
fn standard_directive_with_sub_directives() {
    let input = indoc! {"
        account Assets:Checking
          note My checking account
          default
    "};

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Directive "account"
        Argument "Assets:Checking"
        SubDirective "note"
          Value "My checking account"
        SubDirective "default"
    "#);
}

#[test]
fn directive_without_argument() {
    insta::assert_snapshot!(Journal::expect_clean("python\n"), @r#"
    File
      Directive "python"
    "#);
}

#[test]
fn alias_value_may_contain_equals() {
    insta::assert_snapshot!(Journal::expect_clean("alias Foo=Bar=Baz\n"), @r#"
    File
      Alias
        Name "Foo"
        Value "Bar=Baz"
    "#);
}

#[test]
fn alias_name_and_value_may_contain_spaces() {
    let input = "alias checking=Assets:Bank of Mom:Checking\n";

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Alias
        Name "checking"
        Value "Assets:Bank of Mom:Checking"
    "#);
}

#[test]
fn bare_alias_is_an_error() {
    insta::assert_snapshot!(Journal::expect_errors("alias\n"), @"error[unexpected-eof] at 5..6: expected an alias name before the end of the line");
}

#[test]
fn alias_with_empty_name_is_an_error() {
    insta::assert_snapshot!(Journal::expect_errors("alias =Bar\n"), @"error[unexpected-token] at 6..7: expected an alias name, found `=`");
}

#[test]
fn alias_with_empty_value_is_an_error() {
    insta::assert_snapshot!(Journal::expect_errors("alias Foo=\n"), @"error[unexpected-eof] at 10..11: expected an alias value before the end of the line");
}

#[test]
fn apply_and_end_apply() {
    let input = indoc! {"
        apply account Expenses
        end apply account
    "};

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Apply "account"
        Args "Expenses"
      End "account" (apply)
    "#);
}

#[test]
fn apply_and_end_without_the_keyword() {
    let input = indoc! {"
        apply tag trip
        end tag
    "};

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      Apply "tag"
        Args "trip"
      End "tag"
    "#);
}

#[test]
fn end_requires_a_name() {
    insta::assert_snapshot!(Journal::expect_errors("end\n"), @"error[unexpected-token] at 3..4: expected a name after `end`, found end of line");
}

#[test]
fn apply_requires_a_name() {
    insta::assert_snapshot!(Journal::expect_errors("apply\n"), @"error[unexpected-token] at 5..6: expected a directive name after `apply`, found end of line");
}

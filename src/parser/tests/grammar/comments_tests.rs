use crate::Journal;
use crate::parser::Item;
use indoc::indoc;

#[test]
fn file_level_comments() {
    let input = indoc! {"
        ; semi
        # hash
        2024-06-12 P
    "};

    insta::assert_snapshot!(Journal::expect_clean(input), @r##"
    File
      Comment "; semi"
      Comment "# hash"
      Transaction
        Date "2024-06-12"
        Payee "P"
    "##);
}

#[test]
fn comment_char_and_body() {
    let journal = Journal::parse("; a note\n");
    let Some(Item::Comment(comment)) = journal.file().children.first() else {
        panic!("expected a comment child");
    };
    assert_eq!(comment.comment_char(), ';');
    assert_eq!(comment.body(), " a note");
    assert!(comment.tags().is_empty());
    assert!(comment.typed_tags().is_empty());
}

#[test]
fn comment_block() {
    let input = indoc! {"
        comment
        anything ( goes
        here
        end comment
    "};

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      CommentBlock "comment"
        Body "anything ( goes\nhere\n"
    "#);
}

#[test]
fn test_block() {
    let input = indoc! {"
        test
        stuff
        end test
    "};

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      CommentBlock "test"
        Body "stuff\n"
    "#);
}

// The first lexical `end comment` run terminates the block, even mid-line;
// an IDE consumer may eventually want the stricter start-of-line variant.
#[test]
fn comment_block_stops_at_inline_terminator() {
    let input = "comment\n  text end comment inline\nend comment\n";

    insta::assert_snapshot!(Journal::expect_clean(input), @r#"
    File
      CommentBlock "comment"
        Body "  text "
      Directive "inline"
      End "comment"
    "#);
}

#[test]
fn unterminated_comment_block() {
    let input = "alias a=b\ncomment\nnever ends\n";

    insta::assert_snapshot!(Journal::expect_errors(input), @"error[unexpected-eof] at 29..29: expected `end comment` before end of input");

    let journal = Journal::parse(input);
    assert_eq!(journal.file().children.len(), 1);
    assert!(matches!(journal.file().children[0], Item::Alias(_)));
}

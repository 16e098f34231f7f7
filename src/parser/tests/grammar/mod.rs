mod amounts_tests;
mod comments_tests;
mod directives_tests;
mod transactions_tests;

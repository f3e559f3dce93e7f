mod forms_tests;
mod groups_tests;

mod content_tests;
mod leads_tests;
mod tools_tests;

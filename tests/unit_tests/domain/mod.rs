mod summary_sections_test;

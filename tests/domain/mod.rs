mod output_name_test;

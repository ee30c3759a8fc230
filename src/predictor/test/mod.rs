mod load_test;

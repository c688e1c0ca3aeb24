mod reconstructor_test;

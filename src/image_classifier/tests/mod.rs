mod impl_fake_test;

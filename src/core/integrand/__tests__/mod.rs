mod isotropic_test;
mod kappa_test;

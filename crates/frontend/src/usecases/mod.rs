pub mod u101_checkout;

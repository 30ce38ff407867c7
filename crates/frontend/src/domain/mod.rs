pub mod a001_client;
pub mod a002_product;
pub mod a003_order;
pub mod a004_dispatch;
pub mod a005_shipment;
pub mod a006_payment;

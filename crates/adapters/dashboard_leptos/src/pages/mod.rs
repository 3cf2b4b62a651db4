mod stock;

pub use stock::StockView;

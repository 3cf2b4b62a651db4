mod stock_table;

pub use stock_table::StockTable;

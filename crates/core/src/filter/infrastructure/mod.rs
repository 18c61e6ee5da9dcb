pub mod crosshair_filter;
pub mod filter_factory;
mod raster;

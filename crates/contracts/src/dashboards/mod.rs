pub mod d500_retail_overview;

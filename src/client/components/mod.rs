pub mod navbar;
pub mod page;
pub mod tour_card;
pub mod tour_list;
pub mod tour_search;

pub use navbar::Navbar;
pub use page::Page;
pub use tour_card::TourCard;
pub use tour_list::TourList;
pub use tour_search::TourSearch;

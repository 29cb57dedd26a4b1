pub mod player;
pub mod team;
pub mod update;
pub mod venue;

pub use player::Player;
pub use team::Team;
pub use update::Update;
pub use venue::Venue;

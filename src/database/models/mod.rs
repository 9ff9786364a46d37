// Row types for the Supabase tables, plus the insert/update statements that
// each resource needs. Reads go through `Repository<T>`.

pub mod category;
pub mod college;
pub mod enums;
pub mod event;
pub mod payment;
pub mod profile;
pub mod registration;
pub mod review;
pub mod team;
pub mod team_member;
pub mod ticket;

pub use category::Category;
pub use college::College;
pub use enums::{EventStatus, ParticipationType, PaymentStatus, RegistrationStatus, TicketType, UserRole};
pub use event::Event;
pub use payment::Payment;
pub use profile::Profile;
pub use registration::Registration;
pub use review::Review;
pub use team::Team;
pub use team_member::TeamMember;
pub use ticket::Ticket;

mod customer;
mod enums;
mod invoice;
mod job;
mod lead;
mod membership;
mod technician;
mod user;

pub use customer::{Customer, NewCustomer, NewProperty, Property};
pub use enums::{
    CustomerType, InvoiceStatus, JobPriority, JobStatus, JobType, LeadSource, LeadStatus,
    MembershipStatus, MembershipTier, UserRole,
};
pub use invoice::{Invoice, NewInvoice};
pub use job::{Job, NewJob};
pub use lead::{Lead, NewLead};
pub use membership::{Membership, NewMembership};
pub use technician::{NewTechnician, Technician};
pub use user::{NewUser, User};

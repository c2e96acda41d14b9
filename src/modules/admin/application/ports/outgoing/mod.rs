mod confirmation;

pub use confirmation::Confirmation;
#[cfg(test)]
pub use confirmation::MockConfirmation;

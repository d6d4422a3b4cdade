#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod user_tests;

#[cfg(test)]
mod policy_tests;

#[cfg(test)]
mod claim_tests;

#[cfg(test)]
mod farm_tests;

#[cfg(test)]
mod overview_tests;

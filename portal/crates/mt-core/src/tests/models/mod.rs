mod intake;
mod role;
mod verification;
mod visit;
mod visit_request;

mod analytics;
mod comment;
mod connection;
mod group;
mod interest;
mod kyc;
mod notification;
mod opening;
mod payment;
mod reaction;
mod report;
mod service;
mod user;
mod verification;

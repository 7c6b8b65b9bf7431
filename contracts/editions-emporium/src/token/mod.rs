mod approval;
mod balance;
mod lifecycle;
mod transfer;

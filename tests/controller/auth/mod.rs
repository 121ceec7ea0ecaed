mod login;
mod logout;
mod user;

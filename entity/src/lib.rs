pub mod employee;
pub mod user;

/*
 Users exist purely for authentication: register once, log in, get a bearer
 token, and use it against the employee endpoints. Employees are plain
 records with no link back to users.
 */

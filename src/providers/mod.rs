pub mod porkbun;

pub mod pem_io;

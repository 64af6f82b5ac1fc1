pub mod adeudos;
pub mod catalogos;
pub mod ciclos_escolares;
pub mod conceptos;
pub mod estudiantes;
pub mod grupos;
pub mod pagos;
pub mod usuarios;

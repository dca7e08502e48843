/// Clave con la identidad serializada (id, token, roles, displayName)
pub const STORAGE_KEY_IDENTITY: &str = "gimnasio_identity";

/// Clave con el token en crudo
pub const STORAGE_KEY_TOKEN: &str = "gimnasio_token";

// Rutas públicas
pub const PATH_LOGIN: &str = "/login";
pub const PATH_ROLE_SELECTION: &str = "/role-selection";
pub const PATH_UNAUTHORIZED: &str = "/unauthorized";

// Prefijos de cada área protegida
pub const AREA_ADMIN: &str = "/admin";
pub const AREA_STAFF: &str = "/staff";
pub const AREA_CLIENT: &str = "/client";

use super::model;
use contracts::domain::a001_client::ClientDto;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the client registration form
#[derive(Clone)]
pub struct ClientDetailsViewModel {
    pub form: RwSignal<ClientDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    /// Fields the user has left at least once; errors only show for these.
    pub touched: RwSignal<Vec<&'static str>>,
}

impl ClientDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ClientDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            touched: RwSignal::new(Vec::new()),
        }
    }

    pub fn touch(&self, field: &'static str) {
        self.touched.update(|t| {
            if !t.contains(&field) {
                t.push(field);
            }
        });
    }

    pub fn field_error(&self, field: &'static str) -> Option<&'static str> {
        if !self.touched.get().contains(&field) {
            return None;
        }
        validate_field(field, &self.form.get())
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || validate_form(&self.form.get()).is_ok()
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) -> impl Fn() + '_ {
        move || {
            let this = self.clone();
            let dto = this.form.get();
            if let Err(e) = validate_form(&dto) {
                this.error.set(Some(e.to_string()));
                return;
            }
            let on_saved_cb = on_saved.clone();
            this.saving.set(true);
            leptos::task::spawn_local(async move {
                match model::save_form(dto).await {
                    Ok(saved) => {
                        this.saving.set(false);
                        this.form.set(ClientDto::default());
                        this.touched.set(Vec::new());
                        if let Some(win) = web_sys::window() {
                            let _ = win.alert_with_message(&format!(
                                "Cliente \"{}\" registrado",
                                saved.nombre
                            ));
                        }
                        on_saved_cb(());
                    }
                    Err(e) => {
                        this.saving.set(false);
                        this.error.set(Some(e));
                    }
                }
            });
        }
    }
}

/// Per-field validation; returns the message to show under the input.
pub fn validate_field(field: &str, dto: &ClientDto) -> Option<&'static str> {
    match field {
        "nombre" => {
            if dto.nombre.trim().is_empty() {
                Some("El nombre es obligatorio")
            } else {
                None
            }
        }
        "cedula_ruc" => {
            let digits = dto.cedula_ruc.trim();
            if digits.is_empty() {
                Some("La cédula o RUC es obligatoria")
            } else if digits.chars().count() < 8 || !digits.chars().all(|c| c.is_ascii_digit()) {
                Some("La cédula o RUC debe tener al menos 8 dígitos")
            } else {
                None
            }
        }
        "telefono" => {
            let t = dto.telefono.trim();
            if t.is_empty() {
                Some("El teléfono es obligatorio")
            } else if !t
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
            {
                Some("El teléfono contiene caracteres no válidos")
            } else {
                None
            }
        }
        "email" => {
            let e = dto.email.trim();
            let well_formed = e
                .split_once('@')
                .map(|(user, host)| !user.is_empty() && host.contains('.') && !host.starts_with('.'))
                .unwrap_or(false);
            if e.is_empty() {
                Some("El correo es obligatorio")
            } else if !well_formed {
                Some("El correo no tiene un formato válido")
            } else {
                None
            }
        }
        "direccion" => {
            if dto.direccion.trim().is_empty() {
                Some("La dirección es obligatoria")
            } else {
                None
            }
        }
        _ => None,
    }
}

const REQUIRED_FIELDS: [&str; 5] = ["nombre", "cedula_ruc", "telefono", "email", "direccion"];

pub fn validate_form(dto: &ClientDto) -> Result<(), &'static str> {
    for field in REQUIRED_FIELDS {
        if let Some(msg) = validate_field(field, dto) {
            return Err(msg);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> ClientDto {
        ClientDto {
            nombre: "Supermercado Central".into(),
            cedula_ruc: "1790012345001".into(),
            telefono: "+593 99 123 4567".into(),
            email: "compras@central.ec".into(),
            direccion: "Av. Principal 123".into(),
            ciudad: "Quito".into(),
            codigo_postal: "170101".into(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_form(&valid_dto()).is_ok());
    }

    #[test]
    fn test_nombre_required() {
        let mut dto = valid_dto();
        dto.nombre = "   ".into();
        assert!(validate_field("nombre", &dto).is_some());
    }

    #[test]
    fn test_cedula_needs_eight_digits() {
        let mut dto = valid_dto();
        dto.cedula_ruc = "1234567".into();
        assert!(validate_field("cedula_ruc", &dto).is_some());

        dto.cedula_ruc = "12345678".into();
        assert!(validate_field("cedula_ruc", &dto).is_none());

        dto.cedula_ruc = "12345abc".into();
        assert!(validate_field("cedula_ruc", &dto).is_some());
    }

    #[test]
    fn test_telefono_charset() {
        let mut dto = valid_dto();
        dto.telefono = "(02) 234-5678".into();
        assert!(validate_field("telefono", &dto).is_none());

        dto.telefono = "llamar al mediodía".into();
        assert!(validate_field("telefono", &dto).is_some());
    }

    #[test]
    fn test_email_shape() {
        let mut dto = valid_dto();
        dto.email = "sin-arroba".into();
        assert!(validate_field("email", &dto).is_some());

        dto.email = "user@host".into();
        assert!(validate_field("email", &dto).is_some());

        dto.email = "user@host.ec".into();
        assert!(validate_field("email", &dto).is_none());
    }

    #[test]
    fn test_ciudad_and_codigo_postal_are_optional() {
        let mut dto = valid_dto();
        dto.ciudad = String::new();
        dto.codigo_postal = String::new();
        assert!(validate_form(&dto).is_ok());
    }
}

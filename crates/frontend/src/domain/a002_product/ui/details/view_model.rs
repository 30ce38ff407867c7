use super::model;
use crate::shared::money::parse_price;
use contracts::domain::a002_product::ProductDto;
use leptos::html::Input;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the product creation form.
///
/// The image file never enters a signal; it is read from the input element
/// at save time, uploaded first, and referenced by URL in the create
/// request.
#[derive(Clone)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub file_input: NodeRef<Input>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            file_input: NodeRef::new(),
        }
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || validate_form(&self.form.get()).is_ok()
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) -> impl Fn() + '_ {
        move || {
            let this = self.clone();
            let mut dto = this.form.get();
            if let Err(e) = validate_form(&dto) {
                this.error.set(Some(e.to_string()));
                return;
            }

            let file = this
                .file_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));

            let on_saved_cb = on_saved.clone();
            this.saving.set(true);
            leptos::task::spawn_local(async move {
                if let Some(file) = file {
                    match model::upload_image(file).await {
                        Ok(url) => dto.imagen_url = url,
                        Err(e) => {
                            this.saving.set(false);
                            this.error.set(Some(format!("Error al subir la imagen: {}", e)));
                            return;
                        }
                    }
                }

                match model::save_form(dto).await {
                    Ok(_) => {
                        this.saving.set(false);
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

pub fn validate_form(dto: &ProductDto) -> Result<(), &'static str> {
    if dto.nombre.trim().is_empty() {
        return Err("El nombre es obligatorio");
    }
    if dto.precio.trim().is_empty() || parse_price(&dto.precio) <= 0.0 {
        return Err("El precio debe ser un número mayor que cero");
    }
    if dto.stock < 0 {
        return Err("El stock no puede ser negativo");
    }
    if dto.categoria.trim().is_empty() {
        return Err("La categoría es obligatoria");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> ProductDto {
        ProductDto {
            nombre: "Teclado mecánico".into(),
            precio: "45.99".into(),
            stock: 20,
            imagen_url: String::new(),
            categoria: "Periféricos".into(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_form(&valid_dto()).is_ok());
    }

    #[test]
    fn test_precio_must_be_positive() {
        let mut dto = valid_dto();
        dto.precio = "0".into();
        assert!(validate_form(&dto).is_err());

        dto.precio = "gratis".into();
        assert!(validate_form(&dto).is_err());
    }

    #[test]
    fn test_stock_not_negative() {
        let mut dto = valid_dto();
        dto.stock = -1;
        assert!(validate_form(&dto).is_err());
    }

    #[test]
    fn test_imagen_is_optional() {
        let dto = valid_dto();
        assert!(dto.imagen_url.is_empty());
        assert!(validate_form(&dto).is_ok());
    }
}

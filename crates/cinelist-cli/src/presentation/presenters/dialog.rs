use cinelist_engine::MovieForm;

use crate::presentation::view_models::{AddMovieDialogViewModel, FormField};

pub fn present_dialog(
    form: &MovieForm,
    focused: FormField,
    error: Option<&str>,
) -> AddMovieDialogViewModel {
    AddMovieDialogViewModel {
        title: form.title.clone(),
        description: form.description.clone(),
        poster_url: form.poster_url.clone(),
        rating: form.rating.value(),
        trailer_url: form.trailer_url.clone(),
        focused,
        error: error.map(str::to_string),
    }
}

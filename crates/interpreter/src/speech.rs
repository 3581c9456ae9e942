//! Spanish speech rendering.
//!
//! Every user-facing sentence lives here; the dispatcher composes behavior,
//! this module composes words. Pure `format!` helpers.

pub fn greeting() -> String {
    "Bienvenido a tu despensa. Puedes añadir productos, quitarlos o preguntarme \
     qué tienes. ¿Qué quieres hacer?"
        .to_string()
}

pub fn added(name: &str, quantity: u32) -> String {
    if quantity == 1 {
        format!("He añadido {name} a tu despensa.")
    } else {
        format!("He añadido {quantity} {name} a tu despensa.")
    }
}

pub fn removed(name: &str) -> String {
    format!("He quitado {name} de tu despensa.")
}

pub fn decremented(name: &str, removed: u32, remaining: u32) -> String {
    format!("He quitado {removed} {name}. Te quedan {remaining}.")
}

pub fn list_page(entries: &str, has_more: bool) -> String {
    if has_more {
        format!("En tu despensa tienes: {entries}. Di «siguiente» para escuchar más.")
    } else {
        format!("En tu despensa tienes: {entries}.")
    }
}

pub fn pantry_empty() -> String {
    "Tu despensa está vacía.".to_string()
}

pub fn no_more_items() -> String {
    "No hay más productos en tu despensa.".to_string()
}

pub fn stock(name: &str, total: u32) -> String {
    match total {
        0 => format!("No tienes {name} en tu despensa."),
        1 => format!("Tienes 1 {name} en tu despensa."),
        n => format!("Tienes {n} {name} en tu despensa."),
    }
}

pub fn not_found(name: &str) -> String {
    format!("No he encontrado {name} en tu despensa.")
}

pub fn clarify() -> String {
    "No te he entendido. ¿Puedes repetir el nombre del producto?".to_string()
}

pub fn store_trouble() -> String {
    "Lo siento, ahora mismo no puedo consultar tu despensa. Inténtalo de nuevo \
     en un momento."
        .to_string()
}

pub fn cleared() -> String {
    "He vaciado tu despensa.".to_string()
}

pub fn acknowledged() -> String {
    "Vale. ¿Qué quieres hacer?".to_string()
}

pub fn goodbye() -> String {
    "Hasta luego.".to_string()
}

pub fn fallback() -> String {
    "No he entendido eso. Puedes añadir, quitar o consultar productos de tu \
     despensa."
        .to_string()
}

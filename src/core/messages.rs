//! # Message Catalogue
//!
//! Every string the user can see lives here, one `Messages` value per
//! language. Templates use `{name}` and `{yes}` placeholders which the flows
//! fill in with [`Messages::contents_header`] and [`Messages::confirm_delete`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn messages(self) -> &'static Messages {
        match self {
            Language::Es => &SPANISH,
            Language::En => &ENGLISH,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" | "spanish" | "español" => Ok(Language::Es),
            "en" | "english" => Ok(Language::En),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Es => write!(f, "es"),
            Language::En => write!(f, "en"),
        }
    }
}

#[derive(Debug)]
pub struct Messages {
    pub app_title: &'static str,
    pub choose_option: &'static str,

    // Menu option names
    pub option_read: &'static str,
    pub option_edit: &'static str,
    pub option_create: &'static str,
    pub option_delete: &'static str,
    pub option_quit: &'static str,

    // Flow headings
    pub read_title: &'static str,
    pub edit_title: &'static str,
    pub create_title: &'static str,
    pub delete_title: &'static str,

    // Prompts
    pub ask_read_name: &'static str,
    pub ask_edit_name: &'static str,
    pub ask_create_name: &'static str,
    pub ask_delete_name: &'static str,
    pub ask_content: &'static str,
    pub press_enter: &'static str,

    pub contents_header: &'static str,
    pub confirm_delete: &'static str,
    /// Compared case-insensitively against the delete confirmation answer.
    pub affirmative: &'static str,

    pub saved: &'static str,
    pub deleted: &'static str,
    pub missing: &'static str,
    pub already_exists: &'static str,

    pub list_failed: &'static str,
    pub read_failed: &'static str,
    pub write_failed: &'static str,
    pub delete_failed: &'static str,
}

impl Messages {
    pub fn contents_header(&self, name: &str) -> String {
        self.contents_header.replace("{name}", name)
    }

    pub fn confirm_delete(&self, name: &str) -> String {
        self.confirm_delete
            .replace("{name}", name)
            .replace("{yes}", self.affirmative)
    }

    /// True when `answer` is the affirmative word, ignoring case.
    pub fn is_affirmative(&self, answer: &str) -> bool {
        answer.to_uppercase() == self.affirmative.to_uppercase()
    }
}

pub static SPANISH: Messages = Messages {
    app_title: "Administrador de archivos",
    choose_option: "Elija una opción: ",

    option_read: "Leer",
    option_edit: "Editar",
    option_create: "Crear",
    option_delete: "Borrar",
    option_quit: "Salir",

    read_title: "Lista de archivos para mostrar su contenido",
    edit_title: "Lista de archivos para editar",
    create_title: "Crear un archivo nuevo",
    delete_title: "Borrar un archivo",

    ask_read_name: "\n\nEscriba el nombre de un archivo para ver su contenido: ",
    ask_edit_name: "\n\nEscriba el nombre de un archivo para editar: ",
    ask_create_name: "\n\nEscriba el nombre de un archivo para crear: ",
    ask_delete_name: "\n\nEscriba el nombre de un archivo para borrar: ",
    ask_content: "\n\nEscriba el nuevo contenido del archivo y presione Enter para guardar:\n",
    press_enter: "\n\nPresione Enter para continuar...",

    contents_header: "\nContenido del archivo: {name}\n",
    confirm_delete: "\n\n¿Está seguro que desea borrar el archivo {name}? Escriba {yes} para borrarlo.\n",
    affirmative: "Si",

    saved: "\n\nArchivo guardado correctamente.",
    deleted: "\n\nArchivo borrado correctamente.",
    missing: "Ese archivo no existe.",
    already_exists: "Ese archivo ya existe. Elija otro nombre.",

    list_failed: "Lo siento. No pude leer la lista de archivos: ",
    read_failed: "No se puede leer ese archivo.",
    write_failed: "No se pudo escribir este archivo. Revise que el archivo exista y que tiene permisos para escribir en él",
    delete_failed: "No se pudo borrar este archivo. Revise que el archivo exista y que tiene permisos para borrarlo",
};

pub static ENGLISH: Messages = Messages {
    app_title: "File manager",
    choose_option: "Choose an option: ",

    option_read: "Read",
    option_edit: "Edit",
    option_create: "Create",
    option_delete: "Delete",
    option_quit: "Quit",

    read_title: "Files available to display",
    edit_title: "Files available to edit",
    create_title: "Create a new file",
    delete_title: "Delete a file",

    ask_read_name: "\n\nType the name of a file to see its contents: ",
    ask_edit_name: "\n\nType the name of a file to edit: ",
    ask_create_name: "\n\nType the name of a file to create: ",
    ask_delete_name: "\n\nType the name of a file to delete: ",
    ask_content: "\n\nType the new file contents and press Enter to save:\n",
    press_enter: "\n\nPress Enter to continue...",

    contents_header: "\nContents of file: {name}\n",
    confirm_delete: "\n\nAre you sure you want to delete {name}? Type {yes} to delete it.\n",
    affirmative: "Yes",

    saved: "\n\nFile saved.",
    deleted: "\n\nFile deleted.",
    missing: "That file does not exist.",
    already_exists: "That file already exists. Choose another name.",

    list_failed: "Sorry. I could not read the file list: ",
    read_failed: "That file cannot be read.",
    write_failed: "Could not write this file. Check that it exists and that you have permission to write to it",
    delete_failed: "Could not delete this file. Check that it exists and that you have permission to delete it",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_is_default() {
        assert_eq!(Language::default(), Language::Es);
        assert_eq!(Language::default().messages().affirmative, "Si");
    }

    #[test]
    fn test_affirmative_ignores_case() {
        let m = Language::Es.messages();
        assert!(m.is_affirmative("Si"));
        assert!(m.is_affirmative("si"));
        assert!(m.is_affirmative("SI"));
        assert!(!m.is_affirmative("no"));
        assert!(!m.is_affirmative(""));
        assert!(!m.is_affirmative("y"));
        assert!(!m.is_affirmative("Si "));
    }

    #[test]
    fn test_english_affirmative() {
        let m = Language::En.messages();
        assert!(m.is_affirmative("yes"));
        assert!(!m.is_affirmative("si"));
    }

    #[test]
    fn test_templates_fill_placeholders() {
        let m = Language::Es.messages();
        assert_eq!(m.contents_header("a.txt"), "\nContenido del archivo: a.txt\n");
        let question = m.confirm_delete("a.txt");
        assert!(question.contains("borrar el archivo a.txt?"));
        assert!(question.contains("Escriba Si para borrarlo."));
        assert!(!question.contains('{'));
    }

    #[test]
    fn test_language_parses_names() {
        assert_eq!("EN".parse::<Language>(), Ok(Language::En));
        assert_eq!(" es ".parse::<Language>(), Ok(Language::Es));
        assert!("fr".parse::<Language>().is_err());
    }
}

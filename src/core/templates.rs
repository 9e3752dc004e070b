//! core::templates
//!
//! Fixed file contents written into the generated project.

/// Placeholder root component, valid as both JSX and TSX.
pub const APP_COMPONENT: &str = r#"import React from "react";

const App = () => {
  return <div className="text-xl font-bold underline">I am the Honored One!!</div>;
}

export default App;
"#;

/// Stylesheet bootstrap for Tailwind v4.
pub const TAILWIND_V4_DIRECTIVES: &str = "@import \"tailwindcss\";\n";

/// Stylesheet bootstrap for Tailwind v3.
pub const TAILWIND_V3_DIRECTIVES: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

/// Vite config enabling the React and Tailwind plugins.
pub const VITE_CONFIG_WITH_TAILWIND: &str = r#"import { defineConfig } from 'vite';
import react from '@vitejs/plugin-react';
import tailwindcss from '@tailwindcss/vite';

export default defineConfig({
  plugins: [
    react(),
    tailwindcss(),
  ],
});
"#;

/// Tailwind v3 config scanning the template's sources.
pub const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
export default {
  content: [
    "./index.html",
    "./src/**/*.{js,ts,jsx,tsx}",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;

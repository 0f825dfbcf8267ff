mod facade;
mod regex_ops;

mod array;
mod conversion;
mod guards;
mod number;
mod string;

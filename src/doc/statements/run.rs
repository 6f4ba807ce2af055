/*!
# `RUN`

## Purpose
Run the program from its lowest line.

## Remarks
A `RUN` inside a program starts it over. Ctrl-C stops the program
between lines. An error stops the program and shows its line number.

## Example
```text
10 PRINT "hi"
RUN
hi
Ready.
```

*/

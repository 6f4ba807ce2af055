/*!
# The Program Host

`SAVE`, `LOAD` and `DIR` talk to a program host over a line oriented
link. The terminal build serves the directory named by
`HOMEBASIC_PROGRAMS` (default `programs`). Each message is one line.

```text
*SAVE "name"    the program lines follow, then *EOF
*LOAD "name"    answered one line per *NEXT, then *EOF or !NOTFOUND
*DIR            answered one file name per *NEXT, then *EOF
*BREAK          the interpreter gave up on the current answer
```

Names without a dot get `.bas` appended. `DIR` shows files whose name
contains a dot.

*/
